use crate::corpus;
use crate::{BoyerMoore, KnuthMorrisPratt, Memmem, Naive, Searcher};

#[test]
fn boyer_moore() {
    t::<BoyerMoore>();
}

#[test]
fn knuth_morris_pratt() {
    t::<KnuthMorrisPratt>();
}

#[test]
fn memmem() {
    t::<Memmem>();
}

fn t<S: Searcher>() {
    let corpora = [
        corpus::english(8, 1 << 12),
        corpus::dna(10, 1 << 12),
        corpus::absent(8, 1 << 12),
    ];
    for corpus in &corpora {
        let naive = Naive::build(&corpus.pattern);
        let expected = <Naive as Searcher>::search(&naive, &corpus.text);
        let searcher = S::build(&corpus.pattern);
        let positions = <S as Searcher>::search(&searcher, &corpus.text);
        assert_eq!(positions, expected, "{} disagrees with naive", S::name());
    }
}
