// src/lib.rs

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use services::{
    chart::ChartService, grading::GradingService, statistics::StatisticsService,
};
