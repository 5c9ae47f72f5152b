pub mod frame_loop;
pub mod session;
pub mod time;
pub mod timeline;
