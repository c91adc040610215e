pub mod particles;
pub mod projects;
pub mod typer;

pub use particles::*;
pub use projects::*;
pub use typer::*;
