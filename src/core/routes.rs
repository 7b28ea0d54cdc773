use crate::domain::model::Page;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Login,
    Register,
    Marketplace,
    Taxi,
    Properties,
    Food,
    Errands,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/auth" | "/auth/login" => Route::Login,
            "/auth/register" => Route::Register,
            "/marketplace" => Route::Marketplace,
            "/taxi" => Route::Taxi,
            "/properties" => Route::Properties,
            "/food" => Route::Food,
            "/errands" => Route::Errands,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    /// `NotFound` 沒有固定路徑，回傳 None
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Login => Some("/auth/login"),
            Route::Register => Some("/auth/register"),
            Route::Marketplace => Some("/marketplace"),
            Route::Taxi => Some("/taxi"),
            Route::Properties => Some("/properties"),
            Route::Food => Some("/food"),
            Route::Errands => Some("/errands"),
            Route::Dashboard => Some("/dashboard"),
            Route::NotFound => None,
        }
    }

    /// 有目錄的列表頁
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Marketplace => Some(Page::Marketplace),
            Route::Properties => Some(Page::Properties),
            Route::Food => Some(Page::Food),
            Route::Errands => Some(Page::Errands),
            _ => None,
        }
    }
}
