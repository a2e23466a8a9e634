mod state;
mod view;

pub use view::Explanation;
