mod display_event_handler;
mod focus_handler;
mod frame_handler;
mod input_handler;
mod output_handler;
mod surface_handler;
mod window_handler;
mod workspace_handler;
