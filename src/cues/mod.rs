//! Pre-built sound cues for the platformer.
//!
//! Each cue is a ready-to-play enveloped buffer built from one generator
//! pass plus one envelope pass. Study these to see how the timbres are
//! put together, or use them as starting points for new cues.
//!
//! # Example
//!
//! ```ignore
//! use chipfx::cues;
//!
//! let jump = cues::jump()?;
//! let crash = cues::crash()?;
//! ```

mod collect;
mod crash;
mod jump;
mod land;

pub use collect::collect;
pub use crash::crash;
pub use jump::jump;
pub use land::land;
