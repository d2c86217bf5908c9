use std::io::Cursor;

use arceager::dataset::conll::{ConllSentence, Reader};
use arceager::io::prelude::*;

pub static CONLL_TEXT: &'static str = "\
# sent_id = 1
# text = John loves Mary .
1\tJohn\tJohn\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tloves\tlove\tVERB\tVBZ\t_\t0\troot\t_\t_
3\tMary\tMary\tPROPN\tNNP\t_\t2\tdobj\t_\t_
4\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

# sent_id = 2
# text = No , it was n't Black Monday .
1\tNo\tno\tINTJ\tUH\t_\t7\tdiscourse\t_\t_
2\t,\t,\tPUNCT\t,\t_\t7\tpunct\t_\t_
3\tit\tit\tPRON\tPRP\t_\t7\tnsubj\t_\t_
4\twas\tbe\tVERB\tVBD\t_\t7\tcop\t_\t_
5\tn't\tnot\tPART\tRB\t_\t7\tneg\t_\t_
6\tBlack\tblack\tPROPN\tNNP\t_\t7\tcompound\t_\t_
7\tMonday\tMonday\tPROPN\tNNP\t_\t0\troot\t_\t_
8\t.\t.\tPUNCT\t.\t_\t7\tpunct\t_\t_

# sent_id = 3
1\tPierre\tPierre\tPROPN\tNNP\t_\t2\tcompound\t_\t_
2\tVinken\tVinken\tPROPN\tNNP\t_\t9\tnsubj\t_\t_
3\t,\t,\tPUNCT\t,\t_\t2\tpunct\t_\t_
4\t61\t61\tNUM\tCD\t_\t5\tnummod\t_\t_
5\tyears\tyear\tNOUN\tNNS\t_\t6\tnmod:npmod\t_\t_
6\told\told\tADJ\tJJ\t_\t2\tamod\t_\t_
7\t,\t,\tPUNCT\t,\t_\t2\tpunct\t_\t_
8\twill\twill\tAUX\tMD\t_\t9\taux\t_\t_
9\tjoin\tjoin\tVERB\tVB\t_\t0\troot\t_\t_
10\tthe\tthe\tDET\tDT\t_\t11\tdet\t_\t_
11\tboard\tboard\tNOUN\tNN\t_\t9\tdobj\t_\t_
12\tas\tas\tADP\tIN\t_\t15\tcase\t_\t_
13\ta\ta\tDET\tDT\t_\t15\tdet\t_\t_
14\tnonexecutive\tnonexecutive\tADJ\tJJ\t_\t15\tamod\t_\t_
15\tdirector\tdirector\tNOUN\tNN\t_\t9\tnmod\t_\t_
16\tNov.\tNov.\tPROPN\tNNP\t_\t9\tnmod:tmod\t_\t_
17\t29\t29\tNUM\tCD\t_\t16\tnummod\t_\t_
18\t.\t.\tPUNCT\t.\t_\t9\tpunct\t_\t_
";

pub fn provide_conll_sentences() -> Vec<ConllSentence> {
    let mut reader = Reader::new(Cursor::new(CONLL_TEXT));
    let mut sentences = vec![];
    reader.read(&mut sentences).unwrap();
    sentences
}

/// `(form, tag, head, label)` rows of "Dogs bark loudly".
pub fn provide_dogs_bark_loudly() -> Vec<(&'static str, &'static str, usize, &'static str)> {
    vec![
        ("Dogs", "X", 2, "nsubj"),
        ("bark", "X", 0, "root"),
        ("loudly", "X", 2, "advmod"),
    ]
}
