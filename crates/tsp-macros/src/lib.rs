#[doc(hidden)]
pub use paste::paste;

#[macro_export]
macro_rules! run_fn_on_world {
    ($fn_name:ident, $path_to_world:expr) => {
        $fn_name($path_to_world)
    };
}

/// Generates one `#[test]` per world fixture under `worlds/`, each invoking
/// `$fn_name` with the fixture's path relative to a workspace member crate.
#[macro_export]
macro_rules! test_fn_on_all_worlds {
    ($fn_name:ident, $name:ident) => {
        $crate::paste! {
            #[test]
            fn [<$name _single>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/single.txt");
            }
            #[test]
            fn [<$name _triangle>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/triangle.txt");
            }
            #[test]
            fn [<$name _square>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/square.txt");
            }
            #[test]
            fn [<$name _cross>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/cross.txt");
            }
            #[test]
            fn [<$name _grid9>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/grid9.txt");
            }
            #[test]
            fn [<$name _scatter12>]() {
                $crate::run_fn_on_world!($fn_name, "../../worlds/scatter12.txt");
            }
        }
    };
}
