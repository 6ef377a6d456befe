/// Five rows in the source file layout.
///
/// Sentiments: 0.221, 0.746, -0.092, -0.7, and exactly 0.0 for the last row.
pub(crate) const SAMPLE_CSV: &str = "\
Char,Image [twemoji],Unicode codepoint,Occurrences [5...max],Position [0...1],Neg [0...1],Neut [0...1],Pos [0...1],Sentiment bar (c.i. 95%),Unicode name,Unicode block
😂,,0x1f602,14622,0.805,0.247,0.285,0.468,,FACE WITH TEARS OF JOY,Emoticons
❤,,0x2764,8050,0.747,0.044,0.166,0.790,,HEAVY BLACK HEART,Dingbats
😭,,0x1f62d,2661,0.803,0.436,0.220,0.344,,LOUDLY CRYING FACE,Emoticons
😡,,0x1f621,600,0.2,0.8,0.1,0.1,,POUTING FACE,Emoticons
😐,,0x1f610,450,0.5,0.3,0.4,0.3,,NEUTRAL FACE,Emoticons
";
