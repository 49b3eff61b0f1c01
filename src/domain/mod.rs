// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of presentation concerns

pub mod creature;
pub mod errors;
pub mod team;
