//! 排课核心
//!
//! 纯函数实现的排课语义，不触碰数据库：
//! - `interval`: 有效期区间（两端闭区间，按日粒度比较）
//! - `validators`: 四个占用校验器（教师/教室/整班/分组），有序短路
//! - `resolve`: 固定课表与代课的双来源解析
//! - `grid`: 日 × 节 网格变换与按视角脱敏
//!
//! 存储层在事务内先取当前课位占用快照，再调用这里的校验；
//! 读取侧取回平铺课次列表后调用这里的网格变换。

pub mod grid;
pub mod interval;
pub mod resolve;
pub mod validators;
