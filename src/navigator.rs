use std::fmt;

use tokio::sync::mpsc;
use tracing::debug;
use tracing::warn;

use crate::constants::ROUTE_DASHBOARD;
use crate::constants::ROUTE_LOGIN;
use crate::constants::ROUTE_REGISTER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Login => Some(ROUTE_LOGIN),
            Route::Register => Some(ROUTE_REGISTER),
            Route::Dashboard => Some(ROUTE_DASHBOARD),
            Route::NotFound => None,
        }
    }

    /// Maps a bare path or a full URL to a route. Query strings are ignored.
    pub fn from_path(url: &str) -> Route {
        let path = match url::Url::parse(url) {
            Ok(parsed_url) => parsed_url.path().to_string(),
            Err(_) => url.split('?').next().unwrap_or(url).to_string(),
        };

        let route = match path.as_str() {
            ROUTE_LOGIN => Route::Login,
            ROUTE_REGISTER => Route::Register,
            ROUTE_DASHBOARD => Route::Dashboard,
            _ => Route::NotFound,
        };

        debug!("route::from_path::{}::{:?}", url, route);
        route
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().unwrap_or("<not found>"))
    }
}

/// Whatever decides which screen is mounted. Registration only ever asks it to move on.
pub trait Navigator: Send + Sync {
    fn navigate(
        &self,
        route: Route,
    );
}

/// Forwards navigation requests to a receiver owned by the embedding application.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(
        &self,
        route: Route,
    ) {
        if let Err(e) = self.sender.send(route) {
            warn!("navigator::receiver_dropped::{}", e.0);
        }
    }
}
