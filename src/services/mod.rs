pub mod conditions;
pub mod gear;
pub mod recommend;
pub mod run_time;
pub mod visual_crossing;
