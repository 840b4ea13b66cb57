//! Static view-models: literal display configuration for every page.
//!
//! These records are fixed at build time and trusted; display order is
//! insertion order. The renderer reads them, nothing mutates them except
//! the selection flags managed through [`SelectableList`].

use super::selection::{Selectable, SelectableList};

/// A labelled link to a symbolic route path
#[derive(Debug, Clone)]
pub struct RouteLink {
    pub route: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl RouteLink {
    pub fn new(route: &'static str, label: &'static str) -> Self {
        Self {
            route,
            label,
            selected: false,
        }
    }
}

impl Selectable for RouteLink {
    fn id(&self) -> &str {
        self.route
    }
    fn selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Brand logo shown on the hero page
#[derive(Debug, Clone)]
pub struct BrandLogo {
    #[allow(dead_code)]
    pub src: &'static str,
    pub alt: &'static str,
}

/// Promoted card in the young-favourite carousel
#[derive(Debug, Clone)]
pub struct FavouriteCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[allow(dead_code)]
    pub image: &'static str,
    pub alt: &'static str,
    pub selected: bool,
}

impl Selectable for FavouriteCard {
    fn id(&self) -> &str {
        self.id
    }
    fn selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Product entry in the mobile-app grid
#[derive(Debug, Clone)]
pub struct ProductCard {
    #[allow(dead_code)]
    pub image: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub alt: &'static str,
}

/// App-store badge link
#[derive(Debug, Clone)]
pub struct DownloadLink {
    #[allow(dead_code)]
    pub image: &'static str,
    pub alt: &'static str,
}

/// Item in the navigation-demo list
#[derive(Debug, Clone)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

impl Selectable for NavigationItem {
    fn id(&self) -> &str {
        self.id
    }
    fn selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Header row above the navigation-demo list
#[derive(Debug, Clone)]
pub struct ListHeader {
    pub label: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
}

/// Action button on the demo card
#[derive(Debug, Clone)]
pub struct CardAction {
    pub id: &'static str,
    pub label: &'static str,
}

/// The demo card on the navigation page
#[derive(Debug, Clone)]
pub struct DemoCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub content: &'static str,
    pub actions: Vec<CardAction>,
}

/// Identity block in the page header
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub app_name: &'static str,
    pub breadcrumbs: Vec<&'static str>,
    pub user_name: &'static str,
    pub page_title: &'static str,
    pub client_name: &'static str,
}

/// Sidebar entries: one per view, identified by route path
pub fn sidebar_links() -> SelectableList<RouteLink> {
    let mut links = vec![
        RouteLink::new("/hero", "Hero"),
        RouteLink::new("/fashion", "Fashion"),
        RouteLink::new("/young-favourite", "Favourite"),
        RouteLink::new("/company", "Company Details"),
        RouteLink::new("/navigation", "Navigation"),
    ];
    links[0].selected = true;
    SelectableList::new(links)
}

/// Nav links on the hero landing page (two of these have no registered
/// route in the prototype, matching the original)
pub fn hero_nav_links() -> SelectableList<RouteLink> {
    let mut links = vec![
        RouteLink::new("/catalogue", "CATALOGUE"),
        RouteLink::new("/fashion", "FASHION"),
        RouteLink::new("/young-favourite", "FAVOURITE"),
        RouteLink::new("/lifestyle", "LIFESTYLE"),
    ];
    links[0].selected = true;
    SelectableList::new(links)
}

pub fn brand_logos() -> Vec<BrandLogo> {
    vec![
        BrandLogo { src: "assets/brands/hm.png", alt: "H&M" },
        BrandLogo { src: "assets/brands/obey.png", alt: "OBEY" },
        BrandLogo { src: "assets/brands/shopify.png", alt: "Shopify" },
        BrandLogo { src: "assets/brands/lacoste.png", alt: "Lacoste" },
        BrandLogo { src: "assets/brands/levis.png", alt: "Levi's" },
        BrandLogo { src: "assets/brands/amazon.png", alt: "Amazon" },
    ]
}

/// Carousel cards; the first starts selected
pub fn favourite_cards() -> SelectableList<FavouriteCard> {
    SelectableList::new(vec![
        FavouriteCard {
            id: "trending",
            title: "Trending on instagram",
            subtitle: "Explore Now!",
            image: "assets/favourite/trending.png",
            alt: "Trending fashion on Instagram",
            selected: true,
        },
        FavouriteCard {
            id: "under-40",
            title: "All Under $40",
            subtitle: "Explore Now!",
            image: "assets/favourite/under-40.png",
            alt: "Affordable fashion under $40",
            selected: false,
        },
    ])
}

pub fn product_cards() -> Vec<ProductCard> {
    vec![
        ProductCard {
            image: "assets/products/polkadot-red.png",
            title: "Polkadot Red Dress",
            price: "Rs. 1,499.00",
            alt: "Polkadot Red Dress",
        },
        ProductCard {
            image: "assets/products/striped-pink.png",
            title: "Striped Pink Dress",
            price: "Rs. 1,299.00",
            alt: "Striped Pink Dress",
        },
        ProductCard {
            image: "assets/products/blue-polkadot.png",
            title: "Blue Polkadot Dress",
            price: "Rs. 1,199.00",
            alt: "Blue Polkadot Dress",
        },
        ProductCard {
            image: "assets/products/green-skirt.png",
            title: "Green Skirt Pink Sweater",
            price: "Rs. 999.00",
            alt: "Green Skirt Pink Sweater",
        },
    ]
}

pub fn download_links() -> Vec<DownloadLink> {
    vec![
        DownloadLink {
            image: "assets/badges/app-store.png",
            alt: "Download on App Store",
        },
        DownloadLink {
            image: "assets/badges/google-play.png",
            alt: "Get it on Google Play",
        },
    ]
}

/// Demo list for the navigation page; Item 2 starts selected
pub fn navigation_items() -> SelectableList<NavigationItem> {
    SelectableList::new(vec![
        NavigationItem { id: "item1", label: "Item 1", icon: "+", selected: false },
        NavigationItem { id: "item2", label: "Item 2", icon: "+", selected: true },
        NavigationItem { id: "item3", label: "Item 3", icon: "+", selected: false },
    ])
}

pub fn demo_list_header() -> ListHeader {
    ListHeader {
        label: "Single-line item",
        subtitle: "Secondary text",
        icon: "@",
    }
}

pub fn demo_card() -> DemoCard {
    DemoCard {
        title: "Card title",
        subtitle: "Subtitle text",
        content: "Greyhound divisively hello coldly wonderfully marginally far upon excluding.",
        actions: vec![
            CardAction { id: "action1", label: "Action 1" },
            CardAction { id: "action2", label: "Action 2" },
        ],
    }
}

pub fn header_info() -> HeaderInfo {
    HeaderInfo {
        app_name: "Company Management",
        breadcrumbs: vec!["Empower", "Activation", "Companies"],
        user_name: "John Smith",
        page_title: "Client Summary Editing:",
        client_name: "Client name",
    }
}
