use bingo_core as bingo;

/// Fresh eight digit seed from JavaScript's Math.random
pub(crate) fn random_seed() -> String {
    bingo::seed_from_unit(js_sys::Math::random())
}
