//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use bazaar_app::{
    auth::{CurrentUser, TokenSigner},
    context::AppContext,
    domain::{
        comments::{MockCommentsService, records::CommentRecord},
        products::{MockProductsService, records::ProductRecord},
        reviews::{MockReviewsService, records::ReviewRecord},
        users::{MockUsersService, records::UserRecord},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_SECRET: &str = "test-secret";
pub(crate) const TEST_USER_ID: i32 = 7;
pub(crate) const TEST_USER_EMAIL: &str = "tester@example.com";

/// Stands in for the auth middleware on protected routes.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(CurrentUser {
        id: TEST_USER_ID,
        email: TEST_USER_EMAIL.to_owned(),
    });
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_user(id: i32) -> UserRecord {
    UserRecord {
        id,
        name: "Test User".to_owned(),
        email: TEST_USER_EMAIL.to_owned(),
        password_hash: "$2b$12$invalidinvalidinvalidinvalid".to_owned(),
    }
}

pub(crate) fn make_product(id: i32) -> ProductRecord {
    ProductRecord {
        id,
        name: "Widget".to_owned(),
        description: "A widget".to_owned(),
        price: 9.99,
    }
}

pub(crate) fn make_review(id: i32) -> ReviewRecord {
    ReviewRecord {
        id,
        user_id: TEST_USER_ID,
        product_id: 1,
        rating: 5,
        content: "Great widget".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_comment(id: i32) -> CommentRecord {
    CommentRecord {
        id,
        user_id: TEST_USER_ID,
        product_id: 1,
        content: "Does it ship?".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();
    users.expect_get_user().never();
    users.expect_find_user_by_email().never();
    users.expect_create_user().never();
    users.expect_update_user().never();
    users.expect_delete_user().never();

    users
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_reviews_mock() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_list_reviews().never();
    reviews.expect_get_review().never();
    reviews.expect_create_review().never();
    reviews.expect_delete_review().never();

    reviews
}

fn strict_comments_mock() -> MockCommentsService {
    let mut comments = MockCommentsService::new();

    comments.expect_create_comment().never();
    comments.expect_list_comments().never();
    comments.expect_get_comment().never();
    comments.expect_update_comment().never();
    comments.expect_delete_comment().never();

    comments
}

fn make_state(
    users: MockUsersService,
    products: MockProductsService,
    reviews: MockReviewsService,
    comments: MockCommentsService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        users: Arc::new(users),
        products: Arc::new(products),
        reviews: Arc::new(reviews),
        comments: Arc::new(comments),
        tokens: TokenSigner::new(TEST_SECRET),
    }))
}

pub(crate) fn strict_state() -> Arc<State> {
    make_state(
        strict_users_mock(),
        strict_products_mock(),
        strict_reviews_mock(),
        strict_comments_mock(),
    )
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    make_state(
        users,
        strict_products_mock(),
        strict_reviews_mock(),
        strict_comments_mock(),
    )
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    make_state(
        strict_users_mock(),
        products,
        strict_reviews_mock(),
        strict_comments_mock(),
    )
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    make_state(
        strict_users_mock(),
        strict_products_mock(),
        reviews,
        strict_comments_mock(),
    )
}

pub(crate) fn state_with_comments(comments: MockCommentsService) -> Arc<State> {
    make_state(
        strict_users_mock(),
        strict_products_mock(),
        strict_reviews_mock(),
        comments,
    )
}

/// Login goes through without the auth middleware.
pub(crate) fn login_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn reviews_service(reviews: MockReviewsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_reviews(reviews)))
            .push(route),
    )
}

pub(crate) fn comments_service(comments: MockCommentsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_comments(comments)))
            .hoop(inject_user)
            .push(route),
    )
}
