use crate::{Error, ShCoefficients, SH_COUNT};

type EvalFn = fn(glam::Vec3, &mut ShCoefficients);

// Closed-form real SH bases, keyed by order.
const EVALUATORS: &[(usize, EvalFn)] = &[(3, eval_order3)];

fn eval_order3(d: glam::Vec3, sh: &mut ShCoefficients) {
    const C0: f32 = 0.282_094_8; // sqrt(1/4pi)
    const C1: f32 = 0.488_602_5; // sqrt(3/4pi)
    const C2: f32 = 1.092_548_4; // sqrt(15/4pi)
    const C3: f32 = 0.315_391_57; // sqrt(5/16pi)
    const C4: f32 = 0.546_274_2; // sqrt(15/16pi)

    let glam::Vec3 { x, y, z } = d;
    sh[0] = C0;
    sh[1] = -C1 * y;
    sh[2] = C1 * z;
    sh[3] = -C1 * x;
    sh[4] = C2 * x * y;
    sh[5] = -C2 * y * z;
    sh[6] = C3 * (3.0 * z * z - 1.0);
    sh[7] = -C2 * x * z;
    sh[8] = C4 * (x * x - y * y);
}

/// Evaluates the real SH basis for a fixed order.
///
/// The evaluation routine is picked once, when the evaluator is created.
#[derive(Clone, Copy)]
pub struct Evaluator {
    order: usize,
    eval: EvalFn,
}

impl Evaluator {
    pub fn new(order: usize) -> Result<Self, Error> {
        let &(_, eval) = EVALUATORS
            .iter()
            .find(|&&(o, _)| o == order)
            .ok_or(Error::UnsupportedOrder { order })?;
        // the coefficient array length is fixed at compile time
        if order * order != SH_COUNT {
            return Err(Error::UnsupportedOrder { order });
        }
        log::debug!("Using SH basis of order {}", order);
        Ok(Self { order, eval })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Basis values at `direction`, which is expected to be unit length.
    pub fn evaluate(&self, direction: glam::Vec3) -> ShCoefficients {
        let mut sh = ShCoefficients::default();
        (self.eval)(direction, &mut sh);
        sh
    }
}
