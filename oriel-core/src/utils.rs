pub mod event_hub;
