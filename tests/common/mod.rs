use std::io::Cursor;

use puzzle_core::dataset::{read_dataset, Dataset};

/// Header of the Lichess puzzle database export.
pub const HEADER: &str =
    "PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl,OpeningTags";

/// A slice of the Lichess puzzle database, plus a few low-rated rows so the
/// beginner levels have something to find.
pub const ROWS: &[&str] = &[
    "00008,r6k/pp2r2p/4Rp1Q/3p4/8/1N1P2R1/PqP2bPP/7K b - - 0 24,f2g3 e6e7 b2b1 b3c1 b1c1 h6c1,1852,74,95,3304,crushing hangingPiece long middlegame,https://lichess.org/787zsVup/black#47,",
    "0000D,5rk1/1p3ppp/pq3b2/8/8/1P1Q1N2/P4PPP/3R2K1 w - - 2 27,d3d6 f8d8 d6d8 f6d8,1580,73,92,754,advantage endgame short,https://lichess.org/F8M8OS71#53,",
    "0009B,r2qr1k1/b1p2ppp/pp4n1/P1P1p3/4P1n1/B2P2Pb/3NBP1P/RN1QR1K1 b - - 1 16,b6c5 e2g4 h3g4 d1g4,1128,81,87,542,advantage middlegame short,https://lichess.org/4MWQCxQ6/black#31,Kings_Pawn_Game Kings_Pawn_Game_Leonardis_Variation",
    "000aY,r4rk1/pp3ppp/2n1b3/q1pp2B1/8/P1Q2NP1/1PP1PP1P/2KR3R w - - 0 15,g5e7 a5c3 b2c3 c6e7,1405,76,89,318,advantage master middlegame short,https://lichess.org/iihZGl6t#29,Benoni_Defense Benoni_Defense_Benoni-Indian_Defense",
    "000hf,r1bqk2r/pp1nbNp1/2p1p2p/8/2BP4/1PN3P1/P3QP1P/3R1RK1 b kq - 0 19,e8f7 e2e6 f7f8 e6f7,1526,75,97,580,mate mateIn2 middlegame short,https://lichess.org/71ygsFeE/black#37,Horwitz_Defense Horwitz_Defense_Other_variations",
    "b0001,6k1/5ppp/8/8/8/8/5PPP/3R2K1 b - - 0 30,g8f8 d1d8,640,80,91,1200,backRankMate endgame mate mateIn1 oneMove,https://lichess.org/b0001#59,",
    "b0002,r1b1kbnr/pppp1ppp/2n5/4p3/2B1P2q/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 4 4,g1e2 h4f2,720,80,88,900,mate mateIn1 opening short,https://lichess.org/b0002#7,",
    "b0003,4k3/8/8/3N4/8/8/5q2/4K2R w K - 0 40,e1f2 d5c7,700,80,94,800,fork endgame oneMove,https://lichess.org/b0003#79,",
    "b0004,8/5P1k/8/8/8/8/6K1/8 b - - 0 50,h7g7 f7f8q,610,80,94,300,advancedPawn endgame promotion oneMove,https://lichess.org/b0004#99,",
    "b0005,r3k2r/ppp2ppp/2n5/3q4/8/2N5/PPP2PPP/R2QKB1R w KQkq - 0 12,c3d5 d8d5 f1c4 d5c4,790,80,70,450,pin middlegame short,https://lichess.org/b0005#23,",
    "b0006,2kr4/ppp5/8/8/8/8/PPP5/1K1R4 w - - 0 30,d1d8 c8d8,805,80,99,120,endgame oneMove,https://lichess.org/b0006#59,",
    "b0007,6rk/6pp/8/6N1/8/8/1Q6/6K1 b - - 0 35,h7h6 b2g7 g8g7 g5e6 g7g8,780,80,86,260,long mateIn3 middlegame,https://lichess.org/b0007#69,",
];

pub fn dataset_text() -> String {
    let mut text = String::from(HEADER);
    for row in ROWS {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

pub fn dataset() -> Dataset {
    read_dataset(Cursor::new(dataset_text())).expect("fixture dataset parses")
}
