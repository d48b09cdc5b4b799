//! SQL functions not covered by Diesel's built-in DSL.

use diesel::sql_types::BigInt;

diesel::define_sql_function! {
    /// PostgreSQL `GREATEST` over two bigints.
    ///
    /// Used to clamp coin balances at zero inside a single UPDATE so
    /// concurrent adjustments cannot drive a balance negative.
    fn greatest(a: BigInt, b: BigInt) -> BigInt;
}
