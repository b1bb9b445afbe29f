use crate::common::command::report_from_stdin;
use fake::Fake;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::Sentence;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn cvs_author_reported_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let author = Username().fake::<String>();
    let message = Sentence(3..8).fake::<String>();
    let log = format!(
        "RCS file: /cvsroot/a.c,v\n\
         Working file: a.c\n\
         description:\n\
         ----------------------------\n\
         revision 1.1\n\
         date: 2005-08-29 12:00:00;  author: {author};  state: Exp;\n\
         {message}\n\
         =============================================================================\n"
    );

    report_from_stdin(&log, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("  author: {author}\n")))
        .stdout(predicate::str::contains(format!("  {message}\n")));

    Ok(())
}
