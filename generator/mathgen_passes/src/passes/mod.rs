//! The ordered list of generation passes.
//!
//! Order matters: each pass may only name what an earlier pass declared.
//! [`GenContext::require`] records violations instead of failing, so the
//! driver can report every one of them at the end of the run.

use mathgen_emit::Emitter;

use crate::GenContext;

mod custom_ops;
mod entities;
mod export;
mod misc;
mod operators;
mod prototypes;
mod quaternion;
mod std_adapters;
mod strings;
mod text;
mod utility;

/// One emission routine.
pub struct Pass<E: Emitter> {
    pub name: &'static str,
    pub run: fn(&mut GenContext<E>),
}

impl<E: Emitter> Clone for Pass<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Emitter> Copy for Pass<E> {}

/// Every pass, in emission order.
pub fn passes<E: Emitter>() -> [Pass<E>; 11] {
    [
        Pass {
            name: "prototypes",
            run: prototypes::emit,
        },
        Pass {
            name: "utility",
            run: utility::emit,
        },
        Pass {
            name: "strings",
            run: strings::emit,
        },
        Pass {
            name: "entities",
            run: entities::emit,
        },
        Pass {
            name: "text",
            run: text::emit,
        },
        Pass {
            name: "operators",
            run: operators::emit,
        },
        Pass {
            name: "quaternion",
            run: quaternion::emit,
        },
        Pass {
            name: "custom_ops",
            run: custom_ops::emit,
        },
        Pass {
            name: "misc",
            run: misc::emit,
        },
        Pass {
            name: "export",
            run: export::emit,
        },
        Pass {
            name: "std_adapters",
            run: std_adapters::emit,
        },
    ]
}
