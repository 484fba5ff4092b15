//! Visual guide: proxy model, animation clock, and preview renderer
//!
//! Everything the rendering sink consumes lives here. The proxy mirrors the
//! logical scan state as 27 colored cells; the animation tracks supply the
//! per-frame scale and rotation; the renderer projects both into a pixmap.

pub mod animation;
pub mod proxy;
pub mod renderer;

pub use animation::{PulseTrack, RotationTrack};
pub use proxy::CubeProxy;
pub use renderer::{ProxyLayout, ProxyRenderer, RendererError};
