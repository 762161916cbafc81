pub mod boundary;
pub mod dispatch;
pub mod prompter;
pub mod view;
pub mod wizard;

pub use dispatch::dispatch;
