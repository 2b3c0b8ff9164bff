mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod tooltip;

pub use engine::{ChartEngine, ViewportUpdate};
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use tooltip::{Tooltip, TooltipEntry};
