mod form;
mod view;

pub use view::DataUpload;
