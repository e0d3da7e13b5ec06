mod gamification_service;

pub use gamification_service::GamificationService;
