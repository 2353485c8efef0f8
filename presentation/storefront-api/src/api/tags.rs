use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Cart,
    Wishlist,
    Machinery,
    Session,
    Checkout,
    Notifications,
}
