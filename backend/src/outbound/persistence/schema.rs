//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Users known to the recipe service. Accounts themselves are managed by
    /// the authentication service; only the identifier is stored here.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
    }
}

diesel::table! {
    /// Ingredient catalogue.
    ingredients (id) {
        id -> Int8,
        /// Ingredient name (max 200 characters).
        name -> Varchar,
        /// Unit the ingredient is measured in (max 30 characters).
        measurement_unit -> Varchar,
    }
}

diesel::table! {
    /// Published recipes.
    recipes (id) {
        id -> Int8,
        author_id -> Uuid,
        name -> Varchar,
        text -> Text,
        /// Cooking time in minutes, between 1 and 600.
        cooking_time -> Int4,
        pub_date -> Timestamptz,
    }
}

diesel::table! {
    /// Amount of one ingredient used by one recipe.
    ///
    /// `(ingredient_id, recipe_id)` is unique.
    ingredient_amounts (id) {
        id -> Int8,
        ingredient_id -> Int8,
        recipe_id -> Int8,
        /// Amount in the ingredient's unit, between 1 and 10000.
        amount -> Int4,
    }
}

diesel::table! {
    /// Recipes a user has put in their shopping cart.
    ///
    /// `(user_id, recipe_id)` is unique.
    shopping_carts (id) {
        id -> Int8,
        user_id -> Uuid,
        recipe_id -> Int8,
    }
}

diesel::joinable!(ingredient_amounts -> ingredients (ingredient_id));
diesel::joinable!(ingredient_amounts -> recipes (recipe_id));
diesel::joinable!(recipes -> users (author_id));
diesel::joinable!(shopping_carts -> recipes (recipe_id));
diesel::joinable!(shopping_carts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    ingredients,
    recipes,
    ingredient_amounts,
    shopping_carts,
);
