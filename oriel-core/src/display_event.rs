use crate::models::{
    Handle, InputHandle, InputKind, OutputHandle, Rect, Serial, SurfaceHandle, SurfaceRole,
};

/// Events the backend delivers to the core.
#[derive(Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    SurfaceCreate {
        handle: SurfaceHandle<H>,
        role: SurfaceRole,
        title: Option<String>,
        app_id: Option<String>,
    },
    /// The client acknowledged the configure with this serial.
    SurfaceAck(SurfaceHandle<H>, Serial),
    SurfaceCommit(SurfaceHandle<H>),
    SurfaceDestroy(SurfaceHandle<H>),
    SurfaceTitleChange(SurfaceHandle<H>, String),
    SurfaceAppIdChange(SurfaceHandle<H>, String),
    /// A new display appeared with its geometry and refresh rate in mHz.
    OutputCreate(OutputHandle<H>, Rect, i32),
    OutputDestroy(OutputHandle<H>),
    /// The output is ready for the next frame.
    FrameTick(OutputHandle<H>),
    InputCreate(InputHandle<H>, InputKind, String),
    InputDestroy(InputHandle<H>),
}
