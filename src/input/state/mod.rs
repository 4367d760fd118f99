mod cycle;
mod session;

pub use cycle::AlphaDirection;
pub use session::{SessionSnapshot, SessionState, StrokeStyle, StrokeWidthSettings};
