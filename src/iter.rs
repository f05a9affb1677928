/*!
# Argset: Argument Iterator
*/



#[derive(Debug, Clone)]
/// # Argument Iterator.
///
/// This iterates through the tokens of an [`ArgVec`](crate::ArgVec) as
/// string slices. See [`ArgVec::iter`](crate::ArgVec::iter) and
/// [`ArgVec::args`](crate::ArgVec::args).
pub struct Args<'a> {
	/// # Tokens.
	inner: &'a [String],

	/// # Next Position.
	pos: usize,
}

impl<'a> Iterator for Args<'a> {
	type Item = &'a str;

	/// # Next.
	fn next(&mut self) -> Option<Self::Item> {
		let out = self.inner.get(self.pos)?;
		self.pos += 1;
		Some(out.as_str())
	}

	/// # Size Hint.
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}
}

impl DoubleEndedIterator for Args<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.pos < self.inner.len() {
			let (last, rest) = self.inner.split_last()?;
			self.inner = rest;
			Some(last.as_str())
		}
		else { None }
	}
}

impl ExactSizeIterator for Args<'_> {
	/// # Length.
	fn len(&self) -> usize { self.inner.len().saturating_sub(self.pos) }
}

impl<'a> Args<'a> {
	#[inline]
	/// # New.
	pub(crate) const fn new(inner: &'a [String]) -> Self {
		Self {
			inner,
			pos: 0,
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_args() {
		let raw = vec!["one".to_owned(), "two".to_owned(), "three".to_owned()];
		let mut iter = Args::new(&raw);
		assert_eq!(iter.len(), 3);
		assert_eq!(iter.next(), Some("one"));
		assert_eq!(iter.len(), 2);
		assert_eq!(iter.next_back(), Some("three"));
		assert_eq!(iter.len(), 1);
		assert_eq!(iter.next(), Some("two"));
		assert_eq!(iter.next(), None);
		assert_eq!(iter.next_back(), None);
		assert_eq!(iter.len(), 0);
	}
}
