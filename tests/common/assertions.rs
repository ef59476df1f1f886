//! Custom assertion macros for view trees

/// Assert that none of the assistant-only sections are present
#[macro_export]
macro_rules! assert_bare_bubble {
    ($tree:expr) => {
        let tree = &$tree;
        assert!(tree.query.is_none(), "query block rendered: {:?}", tree.query);
        assert!(tree.results.is_none(), "results table rendered: {:?}", tree.results);
        assert!(tree.actions.is_none(), "action row rendered: {:?}", tree.actions);
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
