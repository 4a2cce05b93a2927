//! Paths reachable without a connected wallet.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Landing route; also where signed-out users are sent.
pub const HOME: &str = "/";

/// Public paths, matched exactly. `/choose-team` and `/choose-team/` are
/// different paths here. The list is nine literal paths: the root in both its
/// empty and `/` forms, the team picker, and intro/connect for each chain.
pub const PUBLIC_ROUTES: [&str; 9] = [
    "",
    "/",
    "/choose-team/",
    "/filecoin/connect/",
    "/filecoin/intro/",
    "/ethereum/connect/",
    "/ethereum/intro/",
    "/polygon/connect/",
    "/polygon/intro/",
];

pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}
