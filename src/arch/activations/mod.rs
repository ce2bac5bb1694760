mod sigmoid;

pub use sigmoid::{CLIP, Sigmoid};
