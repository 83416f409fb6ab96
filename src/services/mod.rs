pub mod chat_service;
pub mod community_reviews;
pub mod cost_calculator;
pub mod crowd_predictor;
pub mod day_partitioner;
pub mod distance_service;
pub mod hidden_gems;
pub mod interest_catalog;
pub mod itinerary_generation_service;
pub mod packing_list;
pub mod pricing_service;
pub mod route_optimization_service;
pub mod spot_scoring;
pub mod weather_service;
