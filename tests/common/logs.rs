use rstest::fixture;

/// Two files; one commit carries a commit id, the initial import does not.
#[fixture]
pub fn cvs_log() -> String {
    r#"
RCS file: /cvsroot/proj/src/main.c,v
Working file: src/main.c
head: 1.3
branch:
locks: strict
access list:
symbolic names:
keyword substitution: kv
total revisions: 3;	selected revisions: 3
description:
----------------------------
revision 1.3
date: 2005-08-29 16:39:12 +0000;  author: rgr;  state: Exp;  lines: +4 -2;  commitid: 7a0c43133a1e1b12;
Handle empty input.
----------------------------
revision 1.2
date: 2005-08-28 09:00:00 +0000;  author: jo;  state: Exp;  lines: +10 -0;
Add option parsing.
----------------------------
revision 1.1
date: 2005-08-27 08:00:00 +0000;  author: rgr;  state: Exp;
Initial revision
=============================================================================

RCS file: /cvsroot/proj/src/util.c,v
Working file: src/util.c
head: 1.2
branch:
locks: strict
access list:
symbolic names:
keyword substitution: kv
total revisions: 2;	selected revisions: 2
description:
----------------------------
revision 1.2
date: 2005-08-29 16:39:14 +0000;  author: rgr;  state: Exp;  lines: +1 -1;  commitid: 7a0c43133a1e1b12;
Handle empty input.
----------------------------
revision 1.1
date: 2005-08-27 08:01:30 +0000;  author: rgr;  state: Exp;
Initial revision
=============================================================================
"#
    .to_string()
}

#[fixture]
pub fn cvs_report() -> String {
    "2005-08-29 16:39:12:\n\
     \x20 author: rgr;  commitid: 7a0c43133a1e1b12\n\
     \x20 Handle empty input.\n\
     \x20 => src/main.c 1.3:  state: Exp;  lines: +4 -2\n\
     \x20 => src/util.c 1.2:  state: Exp;  lines: +1 -1\n\
     \x20    Total lines: +5 -3\n\
     \n\
     2005-08-28 09:00:00:\n\
     \x20 author: jo\n\
     \x20 Add option parsing.\n\
     \x20 => src/main.c 1.2:  state: Exp;  lines: +10 -0\n\
     \n\
     2005-08-27 08:00:00:\n\
     \x20 author: rgr\n\
     \x20 Initial revision\n\
     \x20 => src/main.c 1.1:  state: Exp\n\
     \x20 => src/util.c 1.1:  state: Exp\n\
     \n"
    .to_string()
}

/// Three revisions by one author with one message, at +0 s, +120 s and +121 s.
#[fixture]
pub fn cvs_fuzzy_log() -> String {
    r#"RCS file: /cvsroot/proj/a.c,v
Working file: a.c
description:
----------------------------
revision 1.2
date: 2005-08-29 12:00:00;  author: rgr;  state: Exp;  lines: +1 -0;
Tidy up.
=============================================================================
RCS file: /cvsroot/proj/b.c,v
Working file: b.c
description:
----------------------------
revision 1.4
date: 2005-08-29 12:02:00;  author: rgr;  state: Exp;  lines: +2 -0;
Tidy up.
=============================================================================
RCS file: /cvsroot/proj/c.c,v
Working file: c.c
description:
----------------------------
revision 1.7
date: 2005-08-29 12:02:01;  author: rgr;  state: Exp;  lines: +3 -0;
Tidy up.
=============================================================================
"#
    .to_string()
}

#[fixture]
pub fn svn_log() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<log>
<logentry
   revision="2">
<author>rogers</author>
<date>2009-03-19T02:47:39.123456Z</date>
<paths>
<path
   kind="file"
   action="M">/trunk/vc-chrono-log.rb</path>
<path
   kind="file"
   action="A">/trunk/README</path>
</paths>
<msg>Fix the date handling.

	Also add a README.</msg>
</logentry>
<logentry
   revision="1">
<author>rogers</author>
<date>2009-03-18T10:00:00.000000Z</date>
<paths>
<path
   kind="file"
   action="A">/trunk/vc-chrono-log.rb</path>
</paths>
<msg>Initial import.</msg>
</logentry>
</log>
"#
    .to_string()
}

#[fixture]
pub fn svn_report() -> String {
    "2009-03-19 02:47:39:\n\
     \x20 revision: 2;  author: rogers\n\
     \x20 Fix the date handling.\n\
     \n\
     \t  Also add a README.\n\
     \x20 => /trunk/README:  action: A\n\
     \x20 => /trunk/vc-chrono-log.rb:  action: M\n\
     \n\
     2009-03-18 10:00:00:\n\
     \x20 revision: 1;  author: rogers\n\
     \x20 Initial import.\n\
     \x20 => /trunk/vc-chrono-log.rb:  action: A\n\
     \n"
    .to_string()
}
