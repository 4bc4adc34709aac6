use actix_web::web;

use crate::service::{marks::marks_api, root::root_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).configure(marks_api);
}
