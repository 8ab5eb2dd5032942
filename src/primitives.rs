use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0 or 1).
///
/// `carry` must be 0 or 1.
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    debug_assert!(carry <= 1);
    let ret = (lhs as WideWord) + (rhs as WideWord) + (carry as WideWord);
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new borrow (0 or 1).
///
/// `borrow` must be 0 or 1.
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    debug_assert!(borrow <= 1);
    // Two overflowing steps rather than a `WideWord` difference: only one of them can
    // underflow, so OR-ing the flags yields a single borrow bit.
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow);
    (ret, (b1 | b2) as Word)
}
