pub mod proxy_plan;
pub mod user;
