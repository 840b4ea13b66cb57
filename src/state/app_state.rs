//! Application state definitions

use super::forms::CompanyDetailsForm;
use super::selection::SelectableList;
use super::view_model::{
    self, BrandLogo, DemoCard, DownloadLink, FavouriteCard, HeaderInfo, ListHeader,
    NavigationItem, ProductCard, RouteLink,
};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page with nav links and brand logos
    #[default]
    Hero,
    Fashion,
    YoungFavourite,
    CompanyDetails,
    Navigation,
}

impl View {
    /// Resolve a symbolic route path, mirroring the original route table.
    /// Unregistered paths (e.g. `/catalogue`) return `None`.
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "" | "/" | "/hero" => Some(Self::Hero),
            "/fashion" => Some(Self::Fashion),
            "/young-favourite" => Some(Self::YoungFavourite),
            "/company" => Some(Self::CompanyDetails),
            "/navigation" => Some(Self::Navigation),
            _ => None,
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::Hero => "/hero",
            Self::Fashion => "/fashion",
            Self::YoungFavourite => "/young-favourite",
            Self::CompanyDetails => "/company",
            Self::Navigation => "/navigation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Fashion => "Fashion",
            Self::YoungFavourite => "Young Favourite",
            Self::CompanyDetails => "Company Details",
            Self::Navigation => "Navigation",
        }
    }
}

/// All mutable state owned by the running application.
///
/// Each component's view-model lives here exclusively; nothing is shared
/// or persisted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub sidebar: SelectableList<RouteLink>,
    pub hero_nav: SelectableList<RouteLink>,
    pub brand_logos: Vec<BrandLogo>,
    pub favourites: SelectableList<FavouriteCard>,
    pub products: Vec<ProductCard>,
    pub downloads: Vec<DownloadLink>,
    pub nav_demo: SelectableList<NavigationItem>,
    pub demo_list_header: ListHeader,
    pub demo_card: DemoCard,
    pub header: HeaderInfo,
    pub company_form: CompanyDetailsForm,
    /// Transient notice shown in the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            sidebar: view_model::sidebar_links(),
            hero_nav: view_model::hero_nav_links(),
            brand_logos: view_model::brand_logos(),
            favourites: view_model::favourite_cards(),
            products: view_model::product_cards(),
            downloads: view_model::download_links(),
            nav_demo: view_model::navigation_items(),
            demo_list_header: view_model::demo_list_header(),
            demo_card: view_model::demo_card(),
            header: view_model::header_info(),
            company_form: CompanyDetailsForm::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Switch views and keep the sidebar highlight in step
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
        self.sidebar.select(view.route());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod routes {
        use super::*;

        #[test]
        fn test_registered_routes_resolve() {
            assert_eq!(View::from_route("/hero"), Some(View::Hero));
            assert_eq!(View::from_route("/fashion"), Some(View::Fashion));
            assert_eq!(View::from_route("/young-favourite"), Some(View::YoungFavourite));
            assert_eq!(View::from_route("/company"), Some(View::CompanyDetails));
            assert_eq!(View::from_route("/navigation"), Some(View::Navigation));
        }

        #[test]
        fn test_empty_path_is_the_landing_page() {
            assert_eq!(View::from_route(""), Some(View::Hero));
            assert_eq!(View::from_route("/"), Some(View::Hero));
        }

        #[test]
        fn test_unregistered_routes_do_not_resolve() {
            assert_eq!(View::from_route("/catalogue"), None);
            assert_eq!(View::from_route("/lifestyle"), None);
        }

        #[test]
        fn test_route_round_trip() {
            for view in [
                View::Hero,
                View::Fashion,
                View::YoungFavourite,
                View::CompanyDetails,
                View::Navigation,
            ] {
                assert_eq!(View::from_route(view.route()), Some(view));
            }
        }
    }

    mod state {
        use super::*;

        #[test]
        fn test_default_state_starts_on_hero() {
            let state = AppState::default();
            assert_eq!(state.current_view, View::Hero);
            assert!(state.status_message.is_none());
        }

        #[test]
        fn test_set_view_moves_sidebar_highlight() {
            let mut state = AppState::default();
            state.set_view(View::CompanyDetails);
            assert_eq!(state.sidebar.selected().unwrap().route, "/company");
        }
    }
}
