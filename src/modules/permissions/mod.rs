pub mod editor;

pub use editor::PermissionEditor;
