//! Static registration macros.

/// Submits a type to a family at link time.
///
/// The candidate is collected through `inventory` and offered to every family
/// of the contract when it is built. The declared name defaults to the type as
/// written; the factory defaults to [`Default`].
///
/// ```ignore
/// register!(Plugins, LineCountPlugin, provides: ["run"]);
/// register!(Plugins, Tagged, name: "TaggedPlugin", provides: ["run"], factory: Tagged::boxed);
/// ```
#[macro_export]
macro_rules! register {
	(
		$family:ty, $ty:ty
		$(, name: $name:expr)?
		$(, provides: [$($op:expr),* $(,)?])?
		, factory: $factory:expr
		$(,)?
	) => {
		const _: () = {
			static CANDIDATE: $crate::Candidate<$family> = $crate::Candidate::with_operations(
				$crate::__reg_opt!($({$name})?, stringify!($ty)),
				module_path!(),
				&[$($($op),*)?],
				$factory,
			);

			$crate::__private::inventory::submit! {
				$crate::Submission::new(&CANDIDATE)
			}
		};
	};
	(
		$family:ty, $ty:ty
		$(, name: $name:expr)?
		$(, provides: [$($op:expr),* $(,)?])?
		$(,)?
	) => {
		const _: () = {
			fn factory() -> ::std::boxed::Box<<$family as $crate::Contract>::Object> {
				::std::boxed::Box::new(<$ty as ::core::default::Default>::default())
			}

			static CANDIDATE: $crate::Candidate<$family> = $crate::Candidate::with_operations(
				$crate::__reg_opt!($({$name})?, stringify!($ty)),
				module_path!(),
				&[$($($op),*)?],
				factory,
			);

			$crate::__private::inventory::submit! {
				$crate::Submission::new(&CANDIDATE)
			}
		};
	};
}

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __reg_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
