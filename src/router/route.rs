//! Route parsing
//!
//! Routes are addressed by the same path strings notifications use as
//! redirect targets, e.g. `/ratings/42`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No page matches '{0}'")]
    Unknown(String),

    #[error("Invalid property id '{0}'")]
    InvalidId(String),
}

/// Property detail pages backed by a JSON endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    AboutProperty,
    BankInfo,
    Amenities,
    BuilderDetails,
    Ratings,
}

impl PageKind {
    /// Menu order on the home page
    pub const ALL: [PageKind; 5] = [
        PageKind::AboutProperty,
        PageKind::BankInfo,
        PageKind::Amenities,
        PageKind::BuilderDetails,
        PageKind::Ratings,
    ];

    /// Path segment shared by the route and the backend endpoint
    pub fn segment(self) -> &'static str {
        match self {
            PageKind::AboutProperty => "aboutproperty",
            PageKind::BankInfo => "bankinfo",
            PageKind::Amenities => "amenities",
            PageKind::BuilderDetails => "builderdetails",
            PageKind::Ratings => "ratings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKind::AboutProperty => "About Property",
            PageKind::BankInfo => "Bank Info",
            PageKind::Amenities => "Amenities",
            PageKind::BuilderDetails => "Builder Details",
            PageKind::Ratings => "Ratings",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.segment().eq_ignore_ascii_case(segment))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Page { page: PageKind, property_id: u64 },
}

impl Route {
    pub fn page(page: PageKind, property_id: u64) -> Self {
        Route::Page { page, property_id }
    }

    pub fn parse(target: &str) -> Result<Route, RouteError> {
        let trimmed = target.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }

        let mut parts = trimmed.split('/');
        let segment = parts.next().unwrap_or_default();
        let page =
            PageKind::from_segment(segment).ok_or_else(|| RouteError::Unknown(target.to_string()))?;

        let id = match (parts.next(), parts.next()) {
            (Some(id), None) => id,
            _ => return Err(RouteError::Unknown(target.to_string())),
        };
        let property_id = id
            .parse::<u64>()
            .map_err(|_| RouteError::InvalidId(id.to_string()))?;

        Ok(Route::Page { page, property_id })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Page { page, property_id } => format!("/{}/{}", page.segment(), property_id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Property",
            Route::Page { page, .. } => page.title(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}
