//! Browser side adapters: fetching the dashboard config from our backend and
//! talking to the hosted REST API.

pub mod config;
pub mod supabase;

use common::service::SharedService;
use std::rc::Rc;

/// The shared service as a component property.
///
/// Equality is identity: there is exactly one service per page, so two
/// handles are equal when they point at the same instance.
#[derive(Clone)]
pub struct ServiceHandle(pub SharedService);

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub(crate) fn transport(err: gloo_net::Error) -> common::DashboardError {
    common::DashboardError::Transport(err.to_string())
}
