use std::fmt;

pub struct SpaceSep<I>(pub I);
pub struct StrSep<'a, I>(pub I, pub &'a str);

/// The value if present, otherwise the placeholder.
pub struct OrElse<'a, T>(pub Option<T>, pub &'a str);

macro_rules! impl_fmt {
    ( $( $fmt:ident )* ) => { $(
        #[allow(non_snake_case)]
        fn $fmt<I, T: fmt::$fmt>(iter: I, sep: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
        where
            I: IntoIterator<Item = T>,
        {
            let mut iter = iter.into_iter();
            if let Some(first) = iter.by_ref().next() {
                first.fmt(f)?;
            }
            iter.map(|rest| { f.write_str(sep)?; rest.fmt(f) }).collect()
        }

        impl<I, T: fmt::$fmt> fmt::$fmt for SpaceSep<I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $fmt(self.0.clone(), " ", f)
            }
        }
        impl<I, T: fmt::$fmt> fmt::$fmt for StrSep<'_, I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $fmt(self.0.clone(), self.1, f)
            }
        }
        impl<T: fmt::$fmt> fmt::$fmt for OrElse<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    Some(x) => x.fmt(f),
                    None => f.pad(self.1),
                }
            }
        }
    )* }
}

impl_fmt! { Debug Display }

#[test]
fn sanity_check() {
    let a = [0, 1, 2];
    assert_eq!(format!("{}", StrSep(&a[..0], "_")), "");
    assert_eq!(format!("{}", StrSep(&a[..1], "_")), "0");
    assert_eq!(format!("{}", StrSep(&a, ", ")), "0, 1, 2");

    assert_eq!(format!("{}", SpaceSep(&a[..0])), "");
    assert_eq!(format!("{}", SpaceSep(&a[..2])), "0 1");
    assert_eq!(format!("{}", SpaceSep(&a)), "0 1 2");
}

#[test]
fn slots() {
    let snap = [Some(1), Some(2), None, Some(-3), None];
    let it = snap.iter().map(|x| OrElse(x.as_ref(), "_"));
    assert_eq!(format!("{}", SpaceSep(it.clone())), "1 2 _ -3 _");
    assert_eq!(format!("{:>2}", SpaceSep(it)), " 1  2  _ -3  _");

    let words = [Some("ab"), None];
    let it = words.iter().map(|x| OrElse(x.as_ref(), "-"));
    assert_eq!(format!("{:?}", SpaceSep(it)), "\"ab\" -");
}
