//! Behavioural tests for shopping-list aggregation and rendering.
//!
//! These scenarios exercise the public API the way the backend does: build
//! validated cart lines, aggregate them, and render the document.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use shopping_list::{
    AggregatedLine, CartLine, DEFAULT_TITLE, ShoppingListDocument, ShoppingListError, aggregate,
    render,
};

/// Test world holding the cart and what was derived from it.
#[derive(Default, ScenarioState)]
struct CartWorld {
    cart: Slot<Vec<CartLine>>,
    aggregated: Slot<Vec<AggregatedLine>>,
    document: Slot<ShoppingListDocument>,
    validation: Slot<Result<CartLine, ShoppingListError>>,
}

impl CartWorld {
    fn cart(&self) -> Vec<CartLine> {
        self.cart.get().expect("cart should be set")
    }

    fn aggregated(&self) -> Vec<AggregatedLine> {
        self.aggregated.get().expect("cart should be aggregated")
    }

    fn document(&self) -> ShoppingListDocument {
        self.document.get().expect("document should be rendered")
    }
}

fn line(name: &str, unit: &str, amount: i64) -> CartLine {
    CartLine::try_new(name, unit, amount).expect("valid fixture line")
}

#[fixture]
fn world() -> CartWorld {
    CartWorld::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a cart with 2 eggs, 500 g of flour and 3 more eggs")]
fn a_cart_with_eggs_and_flour(world: &CartWorld) {
    world.cart.set(vec![
        line("Egg", "pcs", 2),
        line("Flour", "g", 500),
        line("Egg", "pcs", 3),
    ]);
}

#[given("an empty cart")]
fn an_empty_cart(world: &CartWorld) {
    world.cart.set(Vec::new());
}

#[given("a cart line with amount {amount:i64}")]
fn a_cart_line_with_amount(world: &CartWorld, amount: i64) {
    world
        .validation
        .set(CartLine::try_new("Egg", "pcs", amount));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the cart is aggregated")]
fn the_cart_is_aggregated(world: &CartWorld) {
    let aggregated = aggregate(world.cart());
    world.document.set(render(&aggregated));
    world.aggregated.set(aggregated);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the list has {count:usize} rows")]
fn the_list_has_rows(world: &CartWorld, count: usize) {
    assert_eq!(world.aggregated().len(), count);
    assert_eq!(world.document().rows().len(), count);
}

#[then("the rendered body lists 5 eggs then 500 g of flour")]
fn the_rendered_body_lists_eggs_then_flour(world: &CartWorld) {
    assert_eq!(world.document().body(), "1.  Egg - 5 pcs\n2.  Flour - 500 g");
}

#[then("the document shows only the title")]
fn the_document_shows_only_the_title(world: &CartWorld) {
    assert_eq!(world.document().to_string(), DEFAULT_TITLE);
}

#[then("aggregating the reversed cart gives the same list")]
fn aggregating_the_reversed_cart_gives_the_same_list(world: &CartWorld) {
    let mut reversed = world.cart();
    reversed.reverse();
    assert_eq!(aggregate(reversed), world.aggregated());
}

#[then("the total amount is conserved")]
fn the_total_amount_is_conserved(world: &CartWorld) {
    let input: u64 = world.cart().iter().map(|l| u64::from(l.amount())).sum();
    let output: u64 = world
        .aggregated()
        .iter()
        .map(AggregatedLine::total_amount)
        .sum();
    assert_eq!(input, output);
}

#[then("the line is rejected as invalid input")]
fn the_line_is_rejected_as_invalid_input(world: &CartWorld) {
    let result = world.validation.get().expect("validation should run");
    let err = result.expect_err("amount should be rejected");
    assert!(matches!(
        err,
        ShoppingListError::InvalidInput {
            field: "amount",
            ..
        }
    ));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/shopping_list.feature",
    name = "Duplicate ingredients from different recipes are merged"
)]
fn duplicate_ingredients_are_merged(world: CartWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shopping_list.feature",
    name = "An empty cart renders the title only"
)]
fn an_empty_cart_renders_the_title_only(world: CartWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shopping_list.feature",
    name = "Cart order does not change the list"
)]
fn cart_order_does_not_change_the_list(world: CartWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shopping_list.feature",
    name = "A zero amount is rejected"
)]
fn a_zero_amount_is_rejected(world: CartWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shopping_list.feature",
    name = "A negative amount is rejected"
)]
fn a_negative_amount_is_rejected(world: CartWorld) {
    let _ = world;
}
