mod viewer_frame;

pub use viewer_frame::ViewerFrame;
