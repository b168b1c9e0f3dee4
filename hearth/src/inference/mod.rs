mod gateway;

pub use gateway::InferenceGateway;
