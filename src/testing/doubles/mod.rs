mod fake_fetcher;
mod memory_filesystem;
mod recording_tool_runner;

pub use self::fake_extractor::FakeExtractor;
pub use self::fake_fetcher::FakeFetcher;
pub use self::memory_filesystem::MemoryFilesystem;
pub use self::recording_tool_runner::RecordingToolRunner;
