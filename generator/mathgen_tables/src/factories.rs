//! Matrix factory methods and the shapes that host them.
//!
//! Each factory is implemented once, on its minimal shape. Every larger
//! shape forwards to that implementation and resizes the result, which
//! extends toward identity.

use crate::shapes::mat_shapes;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactoryKind {
    Scale2,
    Scale3,
    Translate2,
    Translate3,
    Rotate2,
    Rotate3Normalized,
    Rotate3,
    Ortho2,
    Ortho3,
    LookAt,
    Perspective,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Factory {
    pub kind: FactoryKind,
    pub name: &'static str,
    /// Minimal `(w, h)` shape; the only one with a native body.
    pub min: (usize, usize),
    pub params: &'static str,
    /// Parameter names, as forwarded.
    pub args: &'static str,
}

/// How a shape provides a factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Native,
    /// Calls the implementation on this shape and resizes.
    Forward((usize, usize)),
    Absent,
}

impl Factory {
    const fn new(
        kind: FactoryKind,
        name: &'static str,
        min: (usize, usize),
        params: &'static str,
        args: &'static str,
    ) -> Self {
        Self {
            kind,
            name,
            min,
            params,
            args,
        }
    }

    /// Whether a `w x h` matrix is large enough to hold this transform.
    pub fn fits(&self, w: usize, h: usize) -> bool {
        w >= self.min.0 && h >= self.min.1
    }

    pub fn availability(&self, w: usize, h: usize) -> Availability {
        if (w, h) == self.min {
            Availability::Native
        } else if self.fits(w, h) {
            Availability::Forward(self.min)
        } else {
            Availability::Absent
        }
    }
}

pub const FACTORIES: &[Factory] = &[
    Factory::new(FactoryKind::Scale2, "scale", (2, 2), "vec2<T> factor", "factor"),
    Factory::new(FactoryKind::Scale3, "scale", (3, 3), "vec3<T> factor", "factor"),
    Factory::new(FactoryKind::Translate2, "translate", (3, 2), "vec2<T> offset", "offset"),
    Factory::new(FactoryKind::Translate3, "translate", (4, 3), "vec3<T> offset", "offset"),
    Factory::new(FactoryKind::Rotate2, "rotate", (2, 2), "T angle", "angle"),
    Factory::new(
        FactoryKind::Rotate3Normalized,
        "rotate_with_normalized_axis",
        (3, 3),
        "vec3<T> axis, T angle",
        "axis, angle",
    ),
    Factory::new(FactoryKind::Rotate3, "rotate", (3, 3), "vec3<T> axis, T angle", "axis, angle"),
    Factory::new(FactoryKind::Ortho2, "ortho2D", (3, 2), "vec2<T> min, vec2<T> max", "min, max"),
    Factory::new(
        FactoryKind::Ortho3,
        "ortho",
        (4, 3),
        "vec2<T> min, vec2<T> max, T near, T far",
        "min, max, near, far",
    ),
    Factory::new(
        FactoryKind::LookAt,
        "look_at",
        (4, 3),
        "vec3<T> src, vec3<T> dst, vec3<T> local_up",
        "src, dst, local_up",
    ),
    Factory::new(
        FactoryKind::Perspective,
        "perspective",
        (4, 4),
        "T wh_aspect, T y_fov, T near, T far",
        "wh_aspect, y_fov, near, far",
    ),
];

/// Factories a `w x h` matrix provides, in table order.
pub fn available_for(w: usize, h: usize) -> impl Iterator<Item = (&'static Factory, Availability)> {
    FACTORIES.iter().filter_map(move |f| match f.availability(w, h) {
        Availability::Absent => None,
        found => Some((f, found)),
    })
}

/// Every shape that gets at least one factory.
pub fn hosting_shapes() -> impl Iterator<Item = (usize, usize)> {
    mat_shapes().filter(|(w, h)| FACTORIES.iter().any(|f| f.fits(*w, *h)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_factory_is_native_exactly_once() {
        for f in FACTORIES {
            let natives: Vec<_> = mat_shapes()
                .filter(|(w, h)| f.availability(*w, *h) == Availability::Native)
                .collect();
            assert_eq!(natives, [f.min], "{:?}", f.kind);
        }
    }

    #[test]
    fn forwards_target_the_native_shape() {
        for (w, h) in mat_shapes() {
            for (f, availability) in available_for(w, h) {
                if let Availability::Forward(from) = availability {
                    assert_eq!(f.availability(from.0, from.1), Availability::Native);
                    assert!(from.0 <= w && from.1 <= h);
                }
            }
        }
    }

    #[test]
    fn small_shapes_lack_large_transforms() {
        let names: Vec<_> = available_for(2, 2).map(|(f, _)| f.kind).collect();
        assert_eq!(names, [FactoryKind::Scale2, FactoryKind::Rotate2]);
        assert!(available_for(2, 4).all(|(f, _)| f.min.0 == 2));
        assert_eq!(available_for(4, 4).count(), FACTORIES.len());
    }

    #[test]
    fn overloads_differ_by_parameters() {
        for a in FACTORIES {
            for b in FACTORIES {
                if a.kind != b.kind && a.name == b.name {
                    assert_ne!(a.params, b.params);
                }
            }
        }
    }

    #[test]
    fn args_match_params() {
        for f in FACTORIES {
            let from_params: Vec<_> = f
                .params
                .split(", ")
                .filter_map(|p| p.rsplit(' ').next())
                .collect();
            let args: Vec<_> = f.args.split(", ").collect();
            assert_eq!(from_params, args, "{:?}", f.kind);
        }
    }

    #[test]
    fn every_shape_hosts_something() {
        assert_eq!(hosting_shapes().count(), 9);
    }
}
