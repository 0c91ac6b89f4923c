use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, UserProfile},
        cart::AddToCartRequest,
        orders::{CheckoutRequest, OrderList},
        products::{CategoryCount, CategoryList, ListingData, SellerProfile},
        wishlist::{AddWishlistRequest, WishlistData, WishlistItem},
    },
    listing::{FilterState, SortDirection, SortField, SortState},
    models::{Category, Order, OrderItem, Product, Seller},
    response::{ApiResponse, Meta, PageLinks},
    routes::{account, auth, cart, categories, health, orders, params, products, sellers, wishlist},
    store::{Cart, CartEntry, CartTotals},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        account::account,
        products::list_products,
        products::get_product,
        categories::list_categories,
        sellers::get_seller,
        sellers::list_seller_products,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
        wishlist::wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        orders::list_orders,
        orders::checkout,
        orders::get_order
    ),
    components(
        schemas(
            Product,
            Category,
            Seller,
            Order,
            OrderItem,
            Cart,
            CartEntry,
            CartTotals,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UserProfile,
            AddToCartRequest,
            AddWishlistRequest,
            WishlistItem,
            WishlistData,
            CheckoutRequest,
            OrderList,
            ListingData,
            CategoryCount,
            CategoryList,
            SellerProfile,
            FilterState,
            SortState,
            SortField,
            SortDirection,
            Meta,
            PageLinks,
            params::Pagination,
            params::OrderListQuery,
            ApiResponse<Product>,
            ApiResponse<ListingData>,
            ApiResponse<OrderList>,
            ApiResponse<Cart>,
            ApiResponse<WishlistData>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product listing and detail endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Sellers", description = "Seller profile endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Account", description = "Account endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
