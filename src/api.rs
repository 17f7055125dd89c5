mod config;
mod demo;
mod error;
mod graphhopper;
mod handlers;
mod heap;
mod models;
mod polyline;
mod scoring;
mod util;
#[cfg(test)]
mod debug_tests;

use actix_web::web;

pub(crate) use config::{AppConfig, Mode};
pub(crate) use graphhopper::{GraphHopperClient, RouteSource};

pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::configure(cfg);
}
