pub mod options;
pub mod scene;

pub use options::ClientOptions;
pub use scene::MenuScenePlugin;
