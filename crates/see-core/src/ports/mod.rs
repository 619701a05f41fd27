mod clock;
mod storage;

pub use clock::ClockPort;
pub use storage::{get_value, put_value, KvStorePort, StorageScope};
