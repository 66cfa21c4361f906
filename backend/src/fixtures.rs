//! In-memory fixture table and simulated latency profile.
//!
//! The mock API serves constant records standing in for a live backend. Each
//! endpoint waits for a fixed artificial delay before answering to simulate
//! network cost; the delays are carried in an explicit [`DelayProfile`] so
//! tests can zero them out.

use std::time::Duration;

use dashboard_types::{
    Stock, StockTickerSettings, User, UserProfileSettings, Weather, WeatherSettings, Widget,
    WidgetConfig,
};

const USERS_DELAY: Duration = Duration::from_millis(500);
const WEATHER_DELAY: Duration = Duration::from_millis(800);
const STOCKS_DELAY: Duration = Duration::from_millis(600);
const DASHBOARD_DELAY: Duration = Duration::from_millis(300);

/// Artificial latency applied per endpoint before responding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayProfile {
    /// Delay applied to `/api/users/{id}`.
    pub users: Duration,
    /// Delay applied to `/api/weather`.
    pub weather: Duration,
    /// Delay applied to `/api/stocks`.
    pub stocks: Duration,
    /// Delay applied to `/api/dashboard`.
    pub dashboard: Duration,
}

impl Default for DelayProfile {
    fn default() -> Self {
        Self {
            users: USERS_DELAY,
            weather: WEATHER_DELAY,
            stocks: STOCKS_DELAY,
            dashboard: DASHBOARD_DELAY,
        }
    }
}

impl DelayProfile {
    /// Zero-latency profile for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            users: Duration::ZERO,
            weather: Duration::ZERO,
            stocks: Duration::ZERO,
            dashboard: Duration::ZERO,
        }
    }
}

/// Read-only fixture table backing the mock endpoints.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    user: User,
    weather: Vec<Weather>,
    stocks: Vec<Stock>,
    dashboard: Vec<WidgetConfig>,
}

impl FixtureSet {
    /// Build the demo data set served by every endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: User {
                id: 123,
                name: "John Doe".to_owned(),
                city: "London".to_owned(),
            },
            weather: vec![
                Weather {
                    city: "Moscow".to_owned(),
                    temperature: 15.0,
                    description: "Cloudy".to_owned(),
                },
                Weather {
                    city: "London".to_owned(),
                    temperature: 18.0,
                    description: "Sunny".to_owned(),
                },
            ],
            stocks: vec![
                Stock {
                    symbol: "AAPL".to_owned(),
                    price: 150.25,
                    change: 1.5,
                },
                Stock {
                    symbol: "GOOG".to_owned(),
                    price: 2750.75,
                    change: -10.2,
                },
            ],
            dashboard: vec![
                WidgetConfig {
                    id: 1,
                    widget: Widget::UserProfile(UserProfileSettings { user_id: 123 }),
                },
                WidgetConfig {
                    id: 2,
                    widget: Widget::Weather(WeatherSettings {
                        default_city: "Moscow".to_owned(),
                    }),
                },
                WidgetConfig {
                    id: 3,
                    widget: Widget::StockTicker(StockTickerSettings {
                        symbols: vec!["AAPL".to_owned(), "GOOG".to_owned()],
                    }),
                },
            ],
        }
    }

    /// The single demo user; the requested identifier is not consulted.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Weather for `city`, matched exactly and case-sensitively.
    #[must_use]
    pub fn weather(&self, city: &str) -> Option<&Weather> {
        self.weather.iter().find(|report| report.city == city)
    }

    /// The fixed stock list, in quote order.
    #[must_use]
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// The dashboard layout, in render order.
    #[must_use]
    pub fn dashboard(&self) -> &[WidgetConfig] {
        &self.dashboard
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::new()
    }
}
