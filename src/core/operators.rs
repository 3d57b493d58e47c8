//! "Predict the output" walkthroughs.
//!
//! Every walkthrough returns the exact lines its snippet prints, computed with
//! operators that reproduce 32-bit two's-complement integer semantics.

use std::{cell::RefCell, convert::Infallible, fmt, rc::Rc, str::FromStr};

use indicatif::ProgressBar;

use crate::aux::he::make_custom_error;

make_custom_error!(
    RecursionLimit { depth: usize },
    "recursion without a base case stopped at depth {} (the stack would have overflowed)", depth
);
make_custom_error!(UnknownSnippet { name: String }, "no walkthrough named '{}'", name);

/// `x++`: yields the old value.
#[inline]
pub fn post_inc(x: &mut i32) -> i32 {
    let old = *x;
    *x = x.wrapping_add(1);
    old
}

/// `++x`: yields the new value.
#[inline]
pub fn pre_inc(x: &mut i32) -> i32 {
    *x = x.wrapping_add(1);
    *x
}

pub fn post_increment() -> Vec<String> {
    let mut a = 0;
    vec![post_inc(&mut a).to_string()]
}

/// Nothing is printed: the program is rejected before it starts.
pub fn non_static_entry_point() -> Vec<String> {
    vec![
        "does not run: entry point must be static".to_string(),
        "error: `Main` has no `static` modifier, so no entry point was found".to_string(),
    ]
}

/// Arguments are evaluated left to right even when only the first is printed.
pub fn increment_ordering() -> Vec<String> {
    let mut a = 0;
    let b = post_inc(&mut a);

    let line1 = post_inc(&mut a).to_string();
    let _unprinted = (pre_inc(&mut a), -post_inc(&mut a));

    let left = post_inc(&mut a);
    let right = -post_inc(&mut a);
    let line2 = format!("{left}{right}");

    vec![line1, line2, (!b).to_string()]
}

pub fn shifts_and_not() -> Vec<String> {
    let mut out = vec!["int x = 3;".to_string(), "int y = 2 + ++x;".to_string()];

    let mut x: i32 = 3;
    let mut y = 2 + pre_inc(&mut x);
    out.push(format!("x = {x} and y = {y}"));

    out.push("x = 3 << 2;".to_string());
    out.push("y = 10 >> 1;".to_string());
    x = 3 << 2;
    y = 10 >> 1;
    out.push(format!("x = {x} and y = {y}"));

    x = !x;
    y = !y;
    out.push(format!("x = {x} and y = {y}"));

    out
}

/// `-(i + 1) - i` for `i = i32::MAX`, every step wrapping.
pub fn int_max_overflow() -> i32 {
    let i = i32::MAX;
    i.wrapping_add(1).wrapping_neg().wrapping_sub(i)
}

pub trait WrappingCounter: Copy + PartialOrd + fmt::Display {
    const ZERO: Self;
    const MAX: Self;
    const BITS: u32;

    fn wrapping_inc(self) -> Self;
}

macro_rules! wrapping_counter_impl {
    ($($t:ty),*) => {
        $(
            impl WrappingCounter for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn wrapping_inc(self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )*
    };
}

wrapping_counter_impl!(i8, i16, i32);

const PB_STRIDE: u64 = 1 << 16;

/// Increments a counter from zero until it wraps, returning the step count
/// and the value it wrapped to.
///
/// A loop guarded by `i <= MAX` never ends: the wrapped value still passes
/// the guard. The count is always `2^(BITS - 1)`.
pub fn steps_until_wrap<T: WrappingCounter>(pb: &ProgressBar) -> (u64, T) {
    let mut i = T::ZERO;
    let mut steps = 0_u64;

    loop {
        let next = i.wrapping_inc();
        steps += 1;
        if steps % PB_STRIDE == 0 {
            pb.inc(PB_STRIDE);
        }

        if next < i {
            pb.set_position(steps);
            return (steps, next);
        }
        i = next;
    }
}

fn call_self(depth: usize, limit: usize) -> Result<Infallible, RecursionLimit> {
    if depth >= limit {
        return Err(RecursionLimit::new(depth));
    }
    call_self(depth + 1, limit)
}

/// Recurses with no base case. `limit` stands in for the exhausted stack.
pub fn recurse_without_base_case(limit: usize) -> RecursionLimit {
    match call_self(0, limit) {
        Ok(never) => match never {},
        Err(err) => err,
    }
}

#[derive(Default)]
struct Slot {
    x: i32,
}

/// Two list slots end up sharing one object, so writes through either are seen by both.
pub fn list_aliasing() -> Vec<String> {
    let mut out = Vec::new();
    let mut list: Vec<Rc<RefCell<Slot>>> = vec![Rc::default(), Rc::default()];

    for item in &list {
        let mut slot = item.borrow_mut();
        slot.x += 1;
        out.push(slot.x.to_string());
    }

    list[0] = Rc::clone(&list[1]);
    list[0].borrow_mut().x = 202;
    for item in &list {
        out.push(item.borrow().x.to_string());
    }

    list[0].borrow_mut().x = 111;
    list.remove(0);
    out.push(list.len().to_string());
    out.push(list[0].borrow().x.to_string());

    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Snippet {
    PostIncrement,
    NonStaticEntryPoint,
    IncrementOrdering,
    ShiftsAndNot,
    IntMaxOverflow,
    UnboundedRecursion,
    ListAliasing,
}

impl Snippet {
    pub const NAMES: [&'static str; 7] = [
        "post-increment",
        "non-static-entry-point",
        "increment-ordering",
        "shifts-and-not",
        "int-max-overflow",
        "unbounded-recursion",
        "list-aliasing",
    ];

    const ALL: [Snippet; 7] = [
        Snippet::PostIncrement,
        Snippet::NonStaticEntryPoint,
        Snippet::IncrementOrdering,
        Snippet::ShiftsAndNot,
        Snippet::IntMaxOverflow,
        Snippet::UnboundedRecursion,
        Snippet::ListAliasing,
    ];

    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    pub fn all() -> impl Iterator<Item = Snippet> {
        Self::ALL.into_iter()
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Snippet::PostIncrement => "a = 0; print(a++). Post-increment yields the old value, then bumps a to 1.",
            Snippet::NonStaticEntryPoint => {
                "The same a++ program, but Main is declared `public void` without `static`. \
                 The runtime looks the entry point up on the type, not on an instance, so it \
                 never finds one and the build fails before a single line runs. \
                 Declaring it `public static void Main` fixes it."
            }
            Snippet::IncrementOrdering => {
                "b = a++ leaves b = 0, a = 1. print(a++, ++a, -a++) evaluates all three arguments \
                 but prints only the first. Concatenating a++ and -a++ gives \"4\" + \"-5\". \
                 NOT of 0 flips every bit, which is -1 in two's complement."
            }
            Snippet::ShiftsAndNot => {
                "++x bumps x before use, so y = 2 + 4. 3 << 2 = 12, 10 >> 1 = 5. \
                 NOT x equals -x - 1: ~12 = -13, ~5 = -6."
            }
            Snippet::IntMaxOverflow => {
                "i = MAX; i + 1 wraps to MIN; negating MIN wraps back to MIN; MIN - MAX wraps to 1. \
                 A loop `for (i = 0; i <= MAX; i++)` never ends because i wraps to MIN, which is <= MAX."
            }
            Snippet::UnboundedRecursion => {
                "An entry point that calls itself with no base case recurses until the call stack is exhausted."
            }
            Snippet::ListAliasing => {
                "Each slot is incremented once (1, 1). Slot 0 is overwritten with the object in slot 1, \
                 so setting x = 202 through slot 0 shows in both. After setting 111 and removing slot 0, \
                 one slot remains and it still holds the shared object."
            }
        }
    }

    /// Lines the snippet prints.
    pub fn output(&self) -> Vec<String> {
        match self {
            Snippet::PostIncrement => post_increment(),
            Snippet::NonStaticEntryPoint => non_static_entry_point(),
            Snippet::IncrementOrdering => increment_ordering(),
            Snippet::ShiftsAndNot => shifts_and_not(),
            Snippet::IntMaxOverflow => vec![int_max_overflow().to_string()],
            Snippet::UnboundedRecursion => vec![recurse_without_base_case(RECURSION_LIMIT).to_string()],
            Snippet::ListAliasing => list_aliasing(),
        }
    }
}

const RECURSION_LIMIT: usize = 1_000;

impl FromStr for Snippet {
    type Err = UnknownSnippet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|snip| snip.name() == s)
            .ok_or_else(|| UnknownSnippet::new(s.to_string()))
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
