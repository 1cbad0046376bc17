pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton, ResizeBus, Subscription};
pub use hit::{hit_test, hit_test_any};
pub use layout::{intrinsic_size, layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
