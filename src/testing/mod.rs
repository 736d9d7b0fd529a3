pub mod doubles;

#[allow(unused_imports)]
pub use doubles::FakeExtractor;
#[allow(unused_imports)]
pub use doubles::FakeFetcher;
#[allow(unused_imports)]
pub use doubles::MemoryFilesystem;
#[allow(unused_imports)]
pub use doubles::RecordingToolRunner;
