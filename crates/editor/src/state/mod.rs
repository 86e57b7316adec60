pub mod scene;
pub mod selection;
pub mod settings;

pub use scene::{CycleDirection, History, SceneDocument, SceneState};
pub use selection::Selection;
pub use settings::{EditorSettings, ZoomSettings};
